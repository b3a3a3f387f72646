pub use lark_interpreter::{interpret, Error, Value, VM};

pub fn run(source: &str) -> VM {
  interpret(source).unwrap_or_else(|error| panic!("program should run: {error}"))
}

/// Compile and run a program, then check the observable result: the value
/// left in the last popped stack slot, and that the stack is net-empty.
///
/// ```ignore
/// lark_test!(addition "1 + 2" => "3");
/// lark_test!(bad_operands "true + 5" RuntimeError "unsupported types ...");
/// ```
#[macro_export]
macro_rules! lark_test {
  ($name:ident $source:literal => $expected:literal) => {
    #[test]
    fn $name() {
      let vm = run($source);
      assert_eq!(vm.last_popped_stack_element().to_string(), $expected);
      assert_eq!(vm.stack_pointer(), 0);
    }
  };

  ($name:ident $source:literal RuntimeError $message:literal) => {
    #[test]
    fn $name() {
      match interpret($source) {
        Err(Error::Runtime(error)) => assert_eq!(error.to_string(), $message),
        Err(error) => panic!("expected a runtime error, got: {error}"),
        Ok(vm) => panic!(
          "expected a runtime error, got {}",
          vm.last_popped_stack_element()
        ),
      }
    }
  };

  ($name:ident $source:literal CompileError $message:literal) => {
    #[test]
    fn $name() {
      match interpret($source) {
        Err(Error::Compile(error)) => assert_eq!(error.to_string(), $message),
        Err(error) => panic!("expected a compile error, got: {error}"),
        Ok(vm) => panic!(
          "expected a compile error, got {}",
          vm.last_popped_stack_element()
        ),
      }
    }
  };
}
