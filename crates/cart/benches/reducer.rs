use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use shopmate_cart::{Cart, CartAction};
use shopmate_core::{Product, ProductId, Reducer};

fn product(id: u64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        price: Decimal::new(999 + id as i64, 2),
        thumbnail: format!("https://cdn.example.com/{id}/thumbnail.jpg"),
        category: "footwear".to_string(),
        description: String::new(),
        discount_percentage: Decimal::ZERO,
        rating: Decimal::ZERO,
    }
}

fn cart_with_lines(count: u64) -> Cart {
    (1..=count).fold(Cart::new(), |cart, id| {
        cart.reduce(&CartAction::AddToCart(product(id)))
    })
}

fn bench_add_to_cart(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_to_cart");
    for size in [10u64, 100, 1_000] {
        let cart = cart_with_lines(size);
        let repeat = CartAction::AddToCart(product(size / 2 + 1));
        let fresh = CartAction::AddToCart(product(size + 1));

        group.bench_function(BenchmarkId::new("existing_line", size), |b| {
            b.iter(|| black_box(&cart).reduce(black_box(&repeat)))
        });
        group.bench_function(BenchmarkId::new("new_line", size), |b| {
            b.iter(|| black_box(&cart).reduce(black_box(&fresh)))
        });
    }
    group.finish();
}

fn bench_total_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_price");
    for size in [10u64, 100, 1_000] {
        let cart = cart_with_lines(size);
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| black_box(&cart).total_price())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_to_cart, bench_total_price);
criterion_main!(benches);
