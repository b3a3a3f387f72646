mod lark_test;
use lark_test::*;

lark_test!(integer_literal "5" => "5");

lark_test!(addition "1 + 2" => "3");

lark_test!(subtraction "1 - 2" => "-1");

lark_test!(multiplication "2 * 4" => "8");

lark_test!(division "4 / 2" => "2");

lark_test!(division_truncates "7 / 2" => "3");

lark_test!(mixed_arithmetic "50 / 2 * 2 + 10 - 5" => "55");

lark_test!(grouping "5 * (2 + 10)" => "60");

lark_test!(negation "-50 + 100 + -50" => "0");

lark_test!(full_arithmetic "(5 + 10 * 2 + 15 / 3) * 2 + -10" => "50");

lark_test!(booleans "true" => "true");

lark_test!(less_than "1 < 2" => "true");

lark_test!(greater_than "1 > 2" => "false");

lark_test!(integer_equality "1 == 1" => "true");

lark_test!(integer_inequality "1 != 2" => "true");

lark_test!(boolean_equality "true == true" => "true");

lark_test!(boolean_inequality "true != false" => "true");

lark_test!(comparison_of_comparisons "(1 < 2) == true" => "true");

lark_test!(bang "!true" => "false");

lark_test!(double_bang "!!true" => "true");

lark_test!(string_literal "\"lark\"" => "lark");

lark_test!(string_concatenation "\"la\" + \"rk\"" => "lark");

lark_test!(repeated_string_concatenation "\"a\" + \"b\" + \"c\"" => "abc");

// Two string objects with the same content are still different objects:
// equality away from integers is identity on the canonical singletons.
lark_test!(string_equality_is_identity "\"a\" == \"a\"" => "false");

lark_test!(null_equals_null "if (false) { 1 } == if (false) { 2 }" => "true");

lark_test!(bang_requires_a_boolean
  "!5"
  RuntimeError "only boolean objects are supported by bang prefix operator"
);

lark_test!(bang_rejects_null
  "!if (false) { 1 }"
  RuntimeError "only boolean objects are supported by bang prefix operator"
);

lark_test!(minus_requires_an_integer
  "-true"
  RuntimeError "only integer objects are supported by minus prefix operator"
);

lark_test!(addition_requires_matching_types
  "true + 5"
  RuntimeError "unsupported types for binary operation: BOOLEAN INTEGER"
);

lark_test!(strings_only_support_addition
  "\"la\" - \"rk\""
  RuntimeError "unsupported types for binary operation: STRING STRING"
);

lark_test!(greater_than_requires_integers
  "true > false"
  RuntimeError "unsupported types for binary operation: BOOLEAN BOOLEAN"
);

lark_test!(division_by_zero
  "5 / 0"
  RuntimeError "division by zero"
);
