use criterion::{criterion_group, criterion_main, Criterion};
use equation_fields::{expand, expand_in, MacroTable, Storage};

fn plain_text(c: &mut Criterion) {
    let macros = MacroTable::builtin();
    c.bench_function("plain text", |b| {
        b.iter(|| {
            expand(
                r"
\forall \epsilon > 0, \exists \delta > 0,
\forall x \in \mathbb{R} \qquad |x - c| < \delta \implies |f(x) - L| < \epsilon.
\alpha \beta \gamma \delta \epsilon \zeta \eta \theta
\iota \kappa \lambda \mu \nu \xi \omicron \pi
\rho \sigma \tau \upsilon \phi \chi \psi \omega
",
                &macros,
            )
            .unwrap()
        })
    });
}

fn many_props(c: &mut Criterion) {
    let macros = MacroTable::builtin();
    let input = r"\prop{mass}{kg} \cdot \variable{a} + ".repeat(200);
    c.bench_function("many props", |b| {
        b.iter(|| expand(&input, &macros).unwrap())
    });
}

fn many_props_in_storage(c: &mut Criterion) {
    let macros = MacroTable::builtin();
    let input = r"\prop{mass}{kg} \cdot \variable{a} + ".repeat(200);
    let mut storage = Storage::new();
    c.bench_function("many props in storage", |b| {
        b.iter(|| {
            let len = expand_in(&input, &macros, &storage).unwrap().len();
            storage.reset();
            len
        })
    });
}

criterion_group!(benches, many_props, many_props_in_storage, plain_text);
criterion_main!(benches);
