use equation_fields::{expand, MacroTable};

static FIELDS: &[&str] = &[
    r"F = \prop{m}{kg} \cdot \variable{a}",
    r"E_k = \frac{1}{2} \prop{m}{kg} \variable{v}^2",
    r"p = \prop{m}{kg}",
];

fn main() {
    let macros = MacroTable::builtin();
    for field in FIELDS {
        match expand(field, &macros) {
            Ok(expanded) => println!("{field}\n    => {expanded}"),
            Err(e) => eprintln!("Error while expanding: {}", e),
        }
    }
}
