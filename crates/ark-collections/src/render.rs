//! Display helpers: `Name[a, b]` for sequences, `Name{k: v}` for maps.

use std::fmt;

pub(crate) fn write_seq<'a, T, I>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    brackets: (char, char),
    items: I,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "{}{}", name, brackets.0)?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", brackets.1)
}

pub(crate) fn write_entries<'a, K, V, I>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    entries: I,
) -> fmt::Result
where
    K: fmt::Display + 'a,
    V: fmt::Display + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    write!(f, "{}{{", name)?;
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: {}", key, value)?;
    }
    write!(f, "}}")
}
