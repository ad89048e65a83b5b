use budget_chart::{create_spend_chart, Category};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn build_categories(count: usize, txn_count: usize) -> Vec<Category> {
    (0..count)
        .map(|idx| {
            let mut category = Category::new(format!("Category {idx}"));
            category.deposit(1_000_000.0, "initial deposit");
            for step in 0..txn_count {
                let amount = 5.0 + ((idx + step) % 100) as f64;
                let _ = category.withdraw(amount, "purchase");
            }
            category
        })
        .collect()
}

fn bench_ledger_mutations(c: &mut Criterion) {
    c.bench_function("withdraw_10k", |b| {
        b.iter_batched(
            || {
                let mut category = Category::new("Groceries");
                category.deposit(1_000_000.0, "initial deposit");
                category
            },
            |mut category| {
                for idx in 0..10_000 {
                    let _ = category.withdraw(black_box(1.0 + (idx % 10) as f64), "purchase");
                }
                category
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("transfer_10k", |b| {
        b.iter_batched(
            || {
                let mut source = Category::new("Savings");
                source.deposit(1_000_000.0, "initial deposit");
                (source, Category::new("Travel"))
            },
            |(mut source, mut target)| {
                for _ in 0..10_000 {
                    let _ = source.transfer(black_box(2.5), &mut target);
                }
                (source, target)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_spend_chart(c: &mut Criterion) {
    let categories = build_categories(12, 1_000);
    c.bench_function("spend_chart_12x1k", |b| {
        b.iter(|| {
            let chart = create_spend_chart(black_box(&categories)).expect("chart");
            black_box(chart);
        })
    });

    let food = &categories[0];
    c.bench_function("category_report_1k", |b| {
        b.iter(|| black_box(food.to_string()))
    });
}

criterion_group!(benches, bench_ledger_mutations, bench_spend_chart);
criterion_main!(benches);
