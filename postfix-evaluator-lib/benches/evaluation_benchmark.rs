use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use postfix_evaluator::interpreter::{calculate_with, ArithmeticPolicy, Options};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    let expressions = [
        "1+2".to_string(),
        "3*3+3/3-3".to_string(),
        "(111.111+222.222)/333.333".to_string(),
        "((1*2)+(3/4))*((5-6)/(7+8))-9*10/11".to_string(),
        "1-2-3-4-5-6-7-8-9-10-11-12-13-14-15-16".to_string(),
    ];
    for policy in [ArithmeticPolicy::Float, ArithmeticPolicy::Integer] {
        let options = Options::default().with_policy(policy);
        for expression in &expressions {
            group.throughput(Throughput::Bytes(expression.len() as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", policy), expression),
                expression,
                |bencher, expression| {
                    bencher.iter(|| calculate_with(expression, &options));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
