use equation_fields::{expand, MacroTable};
use inventory::collect;
use libtest_mimic::{Arguments, Failed, Trial};

pub struct TestCase {
    pub name: &'static str,
    pub test: fn() -> Result<(), Failed>,
}
collect!(TestCase);

pub fn test() {
    let args = Arguments::from_args();
    let tests = inventory::iter::<TestCase>
        .into_iter()
        .map(|TestCase { name, test }| Trial::test(*name, test))
        .collect::<Vec<_>>();
    libtest_mimic::run(&args, tests).exit();
}

/// The builtin macros, plus a few more exercising the corners of the expander.
pub fn macros() -> MacroTable {
    let mut table = MacroTable::builtin();
    table.define("foo", 0, "X").unwrap();
    table.define("twice", 1, "#1#1").unwrap();
    table.define("second", 2, "(#2)").unwrap();
    table.define("vec", 1, r"\variable{#1}").unwrap();
    table
}

pub fn expands_to(cases: &[(&'static str, &'static str)]) -> Result<(), Failed> {
    let macros = macros();
    for (input, expected) in cases {
        let output = expand(input, &macros)?;
        if output != *expected {
            return Err(format!(
                "expanding `{input}`\n  expected: `{expected}`\n     found: `{output}`"
            )
            .into());
        }
    }
    Ok(())
}

#[macro_export]
macro_rules! expands {
    ($name:ident, $($input:literal => $expected:literal),+ $(,)?) => {
        pub fn $name() -> Result<(), libtest_mimic::Failed> {
            $crate::common::expands_to(&[$(($input, $expected)),+])
        }

        inventory::submit! {
            $crate::common::TestCase {
                name: stringify!($name),
                test: $name
            }
        }
    };
}
