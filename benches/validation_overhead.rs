//! Validation Overhead Benchmarks
//!
//! Compares building records from raw primitives with no checks against
//! building the validated entities, to measure what the smart constructors
//! cost.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};
use validated_values::entity::{User, UserInput, create_order, create_user};

/// Unvalidated user record, the primitive-obsessed baseline
#[derive(Debug, Clone)]
pub struct RawUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Unvalidated order record
#[derive(Debug, Clone)]
pub struct RawOrder {
    pub item_name: String,
    pub quantity: i64,
    pub price_per_unit: f64,
}

fn user_input(id: usize) -> UserInput {
    UserInput {
        name: "Alice Dupont".to_string(),
        email: format!("user{}@example.com", id),
        phone: format!("06{:08}", id),
        password: "secret123".to_string(),
    }
}

fn user_record(id: usize) -> Value {
    json!({
        "name": "Alice Dupont",
        "email": format!("USER{}@EXAMPLE.COM", id),
        "phone": format!("07{:08}", id),
        "password": "secret123"
    })
}

fn bench_user_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("user_construction");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("raw", size), size, |b, &size| {
            b.iter(|| {
                let users: Vec<RawUser> = (0..size)
                    .map(|i| {
                        let input = user_input(i);
                        RawUser {
                            name: input.name,
                            email: input.email,
                            phone: input.phone,
                            password: input.password,
                        }
                    })
                    .collect();
                black_box(users)
            })
        });

        group.bench_with_input(BenchmarkId::new("validated", size), size, |b, &size| {
            b.iter(|| {
                let users: Vec<User> = (0..size)
                    .filter_map(|i| create_user(user_input(i)).ok())
                    .collect();
                black_box(users)
            })
        });

        let records: Vec<Value> = (0..*size).map(user_record).collect();
        group.bench_with_input(
            BenchmarkId::new("from_json", size),
            &records,
            |b, records| {
                b.iter(|| {
                    let users: Vec<User> = records
                        .iter()
                        .filter_map(|record| User::from_json(record).ok())
                        .collect();
                    black_box(users)
                })
            },
        );
    }

    group.finish();
}

fn bench_order_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_construction");

    group.bench_function("raw", |b| {
        b.iter(|| {
            black_box(RawOrder {
                item_name: "Pizza".to_string(),
                quantity: black_box(3),
                price_per_unit: black_box(15.0),
            })
        })
    });

    group.bench_function("validated", |b| {
        b.iter(|| black_box(create_order("Pizza", black_box(3), black_box(15.0))))
    });

    group.bench_function("rejected", |b| {
        b.iter(|| black_box(create_order("Coffee", black_box(50_000), black_box(3.0))))
    });

    group.finish();
}

criterion_group!(benches, bench_user_construction, bench_order_construction);
criterion_main!(benches);
