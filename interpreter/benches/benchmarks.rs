use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lark_interpreter::{compile, Bytecode, VM};

const ARITHMETIC: &str = "
let a = 5 + 10 * 2 + 15 / 3;
let b = (a + 5) * (a - 5);
let c = -b + a * a;
if (c > b) { c - b } else { b - c }
";

const ITERATIVE: &str = "
let step = fn(total, n) { total + n * n };
step(step(step(step(0, 1), 2), 3), 4)
";

const RECURSIVE_FIBONACCI: &str = "
let fibonacci = fn(x) { if (x < 2) { x } else { fibonacci(x - 1) + fibonacci(x - 2) } };
fibonacci(15)
";

fn compile_source(source: &str) -> Bytecode {
  let program = lark_syntax::parse(source).expect("benchmark source should parse");
  compile(&program).expect("benchmark source should compile")
}

fn benchmarks(c: &mut Criterion) {
  let sources = [
    ("arithmetic", ARITHMETIC),
    ("calls", ITERATIVE),
    ("recursive_fibonacci", RECURSIVE_FIBONACCI),
  ];

  for (name, source) in sources {
    c.bench_function(&format!("{name}/parse"), |b| {
      b.iter(|| lark_syntax::parse(black_box(source)));
    });

    c.bench_function(&format!("{name}/compile"), |b| {
      let program = lark_syntax::parse(source).unwrap();
      b.iter(|| compile(black_box(&program)));
    });

    c.bench_function(&format!("{name}/vm"), |b| {
      let bytecode = compile_source(source);
      b.iter(|| {
        let mut vm = VM::new();
        vm.run(black_box(&bytecode)).expect("no runtime errors");
      });
    });
  }
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
