//! Formateo de valores de descriptor a texto acotado.
//!
//! Función pura y total: cada variante de `DescriptorValue` tiene una regla
//! y ningún valor produce error.

use std::fmt::{self, Write as _};

use chem_domain::DescriptorValue;

use crate::constants::{MAX_SEQUENCE_ITEMS, MISSING_VALUE, REAL_PRECISION};

pub fn format_value(value: &DescriptorValue) -> String {
    let mut out = String::new();
    match write_value(&mut out, value) {
        Ok(()) => out,
        Err(_) => format!("{value:?}"),
    }
}

fn write_value(out: &mut String, value: &DescriptorValue) -> fmt::Result {
    match value {
        DescriptorValue::Missing => out.write_str(MISSING_VALUE),
        DescriptorValue::Real(v) => write_real(out, *v),
        DescriptorValue::Integer(v) => write!(out, "{v}"),
        DescriptorValue::Boolean(v) => write!(out, "{v}"),
        DescriptorValue::RealSeq(items) => write_sequence(out, items, |o, v| write_real(o, *v)),
        DescriptorValue::IntegerSeq(items) => write_sequence(out, items, |o, v| write!(o, "{v}")),
        DescriptorValue::Other(text) => out.write_str(text),
    }
}

fn write_real(out: &mut String, v: f64) -> fmt::Result {
    write!(out, "{v:.prec$}", prec = REAL_PRECISION)
}

fn write_sequence<T>(out: &mut String, items: &[T], mut item: impl FnMut(&mut String, &T) -> fmt::Result) -> fmt::Result {
    out.push('[');
    for (i, v) in items.iter().take(MAX_SEQUENCE_ITEMS).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item(out, v)?;
    }
    if items.len() > MAX_SEQUENCE_ITEMS {
        write!(out, ", ... ({} more values)", items.len() - MAX_SEQUENCE_ITEMS)?;
    }
    out.push(']');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(format_value(&DescriptorValue::Real(3.14159)), "3.1416");
        assert_eq!(format_value(&DescriptorValue::Real(78.114)), "78.1140");
        assert_eq!(format_value(&DescriptorValue::Integer(7)), "7");
        assert_eq!(format_value(&DescriptorValue::Integer(-3)), "-3");
        assert_eq!(format_value(&DescriptorValue::Boolean(true)), "true");
        assert_eq!(format_value(&DescriptorValue::Boolean(false)), "false");
        assert_eq!(format_value(&DescriptorValue::Missing), "N/A");
        assert_eq!(format_value(&DescriptorValue::Other("x".into())), "x");
    }

    #[test]
    fn empty_and_short_sequences() {
        assert_eq!(format_value(&DescriptorValue::RealSeq(vec![])), "[]");
        assert_eq!(format_value(&DescriptorValue::RealSeq(vec![1.0, 0.5])), "[1.0000, 0.5000]");
        assert_eq!(format_value(&DescriptorValue::IntegerSeq(vec![1, 2, 3])), "[1, 2, 3]");
    }

    #[test]
    fn twelve_reals_are_truncated_to_ten() {
        let v: Vec<f64> = (1..=12).map(f64::from).collect();
        assert_eq!(format_value(&DescriptorValue::RealSeq(v)),
                   "[1.0000, 2.0000, 3.0000, 4.0000, 5.0000, 6.0000, 7.0000, 8.0000, 9.0000, 10.0000, ... (2 more values)]");
    }

    #[test]
    fn exactly_ten_items_have_no_suffix() {
        let v: Vec<i64> = (1..=10).collect();
        assert_eq!(format_value(&DescriptorValue::IntegerSeq(v)), "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]");
        let v: Vec<i64> = (1..=11).collect();
        assert!(format_value(&DescriptorValue::IntegerSeq(v)).ends_with("10, ... (1 more values)]"));
    }

    #[test]
    fn non_finite_reals_do_not_fail() {
        assert_eq!(format_value(&DescriptorValue::Real(f64::NAN)), "NaN");
        assert_eq!(format_value(&DescriptorValue::RealSeq(vec![f64::INFINITY])), "[inf]");
    }
}
