mod lark_test;
use lark_test::*;

lark_test!(single_binding "let one = 1; one" => "1");

lark_test!(two_bindings "let one = 1; let two = 2; one + two" => "3");

lark_test!(binding_from_binding "let one = 1; let two = one + one; one + two" => "3");

lark_test!(squares "let x = 3; let y = x * x; y" => "9");

lark_test!(rebinding_takes_a_fresh_slot "let a = 1; let a = a + 1; a" => "2");

lark_test!(string_binding "let greeting = \"hello\"; greeting + \" world\"" => "hello world");

lark_test!(boolean_binding "let truthy = 1 < 2; truthy" => "true");

// storing a global consumes the value from the stack
lark_test!(binding_statement_pops_its_value "let stored = 99" => "99");

lark_test!(unresolved_identifier
  "foo"
  CompileError "unable to resolve identifier: foo"
);

lark_test!(unresolved_identifier_in_binding
  "let a = b;"
  CompileError "unable to resolve identifier: b"
);

lark_test!(bindings_are_not_hoisted
  "let a = a;"
  CompileError "unable to resolve identifier: a"
);
