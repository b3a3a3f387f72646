mod lark_test;
use lark_test::*;

lark_test!(true_condition "if (true) { 10 }" => "10");

lark_test!(true_condition_with_else "if (true) { 10 } else { 20 }" => "10");

lark_test!(false_condition_with_else "if (false) { 10 } else { 20 }" => "20");

lark_test!(comparison_condition "if (1 < 2) { 10 } else { 20 }" => "10");

lark_test!(failed_comparison_condition "if (1 > 2) { 10 } else { 20 }" => "20");

// a falsy condition with no alternative produces null
lark_test!(false_condition_without_else "if (false) { 10 }" => "null");

lark_test!(failed_comparison_without_else "if (1 > 2) { 10 }" => "null");

// anything which is not false and not null counts as truthy
lark_test!(integer_condition "if (1) { 10 }" => "10");

lark_test!(zero_is_truthy "if (0) { 10 }" => "10");

lark_test!(string_condition "if (\"\") { 10 }" => "10");

lark_test!(null_condition_is_falsy "if (if (false) { 10 }) { 10 } else { 20 }" => "20");

lark_test!(nested_conditionals "if (true) { if (true) { 1 } }" => "1");

lark_test!(conditional_value_in_expression "if (1 < 2) { 10 } else { 20 } + 5" => "15");

lark_test!(multiple_statements_in_branch "if (true) { 1; 2; 3 }" => "3");

lark_test!(branches_leave_nothing_behind "if (true) { 1; 2; 3 }; 4;" => "4");
