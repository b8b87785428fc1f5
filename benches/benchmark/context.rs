use crate::common::{check_stock, configure_criterion, DomainError, Order};
use criterion::{criterion_group, BenchmarkId, Criterion};
use ok_rail::{context, ChainError, ErrorContext, Rail};
use std::hint::black_box;

pub fn bench_context_lazy_vs_eager(c: &mut Criterion) {
    let mut group = c.benchmark_group("context/lazy_vs_eager");
    let order = Order::new(1);

    group.bench_function("lazy_success", |b| {
        b.iter(|| {
            let order = black_box(&order);
            Rail::ok(order.clone())
                .and_then_outcome_ctx(check_stock, context!("order: {:?}", order))
        })
    });

    group.bench_function("eager_success", |b| {
        b.iter(|| {
            let order = black_box(&order);
            let message = format!("order: {:?}", order);
            Rail::ok(order.clone()).and_then_outcome_ctx(check_stock, message)
        })
    });

    let failing = Order::new(100);

    group.bench_function("lazy_error", |b| {
        b.iter(|| {
            let order = black_box(&failing);
            Rail::ok(order.clone())
                .and_then_outcome_ctx(check_stock, context!("order: {:?}", order))
        })
    });

    group.bench_function("eager_error", |b| {
        b.iter(|| {
            let order = black_box(&failing);
            let message = format!("order: {:?}", order);
            Rail::ok(order.clone()).and_then_outcome_ctx(check_stock, message)
        })
    });

    group.finish();
}

pub fn bench_chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("context/wrap_depth");

    for depth in [1usize, 5, 20, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut err = ChainError::new(DomainError::OutOfStock(7));
                for i in 0..depth {
                    err = err.wrap(ErrorContext::metadata("layer", i.to_string()));
                }
                black_box(err)
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = context_benches;
    config = configure_criterion();
    targets =
        bench_context_lazy_vs_eager,
        bench_chain_depth,
}
