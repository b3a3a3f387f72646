mod lark_test;
use lark_test::*;

lark_test!(implicit_return
  "let fifteen = fn() { 5 + 10; }; fifteen();"
  => "15"
);

lark_test!(chained_calls
  "let a = fn() { 1 }; let b = fn() { a() + 1 }; let c = fn() { b() + 1 }; c();"
  => "3"
);

lark_test!(immediately_invoked
  "fn() { let x = 1; let y = x + 1; y * y }()"
  => "4"
);

lark_test!(locals_do_not_leak_between_functions
  "let globalSeed = 50;
   let minusOne = fn() { let num = 1; globalSeed - num };
   let minusTwo = fn() { let num = 2; globalSeed - num };
   minusOne() + minusTwo()"
  => "97"
);

lark_test!(explicit_return
  "let exitEarly = fn() { return 99; 100; }; exitEarly();"
  => "99"
);

lark_test!(first_return_wins
  "let exitEarly = fn() { return 99; return 100; }; exitEarly();"
  => "99"
);

lark_test!(conditional_return
  "let pick = fn(n) { if (n > 5) { return 10; } 0 }; pick(6) + pick(1)"
  => "10"
);

lark_test!(empty_body_returns_null
  "let noop = fn() { }; noop();"
  => "null"
);

lark_test!(functions_are_values
  "let returnsOne = fn() { 1; };
   let returner = fn() { returnsOne; };
   returner()();"
  => "1"
);

lark_test!(identity_function "let identity = fn(a) { a; }; identity(4);" => "4");

lark_test!(two_parameters "let sum = fn(a, b) { a + b; }; sum(1, 2);" => "3");

lark_test!(parameters_and_locals
  "let sum = fn(a, b) { let c = a + b; c; }; sum(1, 2) + sum(3, 4);"
  => "10"
);

lark_test!(calls_within_calls
  "let sum = fn(a, b) { let c = a + b; c; };
   let outer = fn() { sum(1, 2) + sum(3, 4); };
   outer();"
  => "10"
);

lark_test!(globals_mix_with_parameters
  "let globalNum = 10;
   let sum = fn(a, b) { let c = a + b; c + globalNum; };
   let outer = fn() { sum(1, 2) + sum(3, 4) + globalNum; };
   outer() + globalNum;"
  => "50"
);

lark_test!(recursion_through_globals
  "let countdown = fn(x) { if (x == 0) { 0 } else { countdown(x - 1) } }; countdown(3);"
  => "0"
);

lark_test!(recursive_fibonacci
  "let fibonacci = fn(x) { if (x < 2) { x } else { fibonacci(x - 1) + fibonacci(x - 2) } };
   fibonacci(10)"
  => "55"
);

lark_test!(too_many_arguments
  "fn() { 1; }(1);"
  RuntimeError "wrong number of arguments: want 0, got 1"
);

lark_test!(too_few_arguments
  "fn(a) { a; }();"
  RuntimeError "wrong number of arguments: want 1, got 0"
);

lark_test!(missing_one_argument
  "fn(a, b) { a + b; }(1);"
  RuntimeError "wrong number of arguments: want 2, got 1"
);

lark_test!(calling_an_integer
  "let one = 1; one(5)"
  RuntimeError "calling non-function: INTEGER"
);

lark_test!(calling_a_string
  "\"not a function\"()"
  RuntimeError "calling non-function: STRING"
);

lark_test!(unbounded_recursion_overflows_the_frame_stack
  "let spin = fn() { spin() }; spin()"
  RuntimeError "frame overflow"
);
