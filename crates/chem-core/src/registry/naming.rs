//! Derivación de nombres legibles a partir del nombre de clase.

/// Quita el sufijo `Descriptor` y separa con un espacio cada minúscula
/// seguida de mayúscula: `RotatableBondsCountDescriptor` -> `Rotatable Bonds Count`.
pub fn derive_display_name(class_name: &str) -> String {
    let base = class_name.strip_suffix("Descriptor").unwrap_or(class_name);
    let mut out = String::with_capacity(base.len() + 4);
    let mut prev: Option<char> = None;
    for c in base.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && c.is_ascii_uppercase() {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Descripción genérica para descriptores sin texto propio.
pub fn derive_description(display_name: &str) -> String {
    format!("Descriptor that calculates {display_name} properties")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_suffix_and_splits_camel_case() {
        assert_eq!(derive_display_name("RotatableBondsCountDescriptor"), "Rotatable Bonds Count");
        assert_eq!(derive_display_name("BCUTDescriptor"), "BCUT");
        assert_eq!(derive_display_name("HBondDonorCountDescriptor"), "HBond Donor Count");
        assert_eq!(derive_display_name("BPol"), "BPol");
        assert_eq!(derive_display_name("AutocorrelationDescriptorMass"), "Autocorrelation Descriptor Mass");
        assert_eq!(derive_display_name("VAdjMaDescriptor"), "VAdj Ma");
    }

    #[test]
    fn only_a_trailing_suffix_is_removed() {
        assert_eq!(derive_display_name("Descriptor"), "");
        assert_eq!(derive_display_name("DescriptorX"), "Descriptor X");
    }

    #[test]
    fn fallback_description() {
        assert_eq!(derive_description("BCUT"), "Descriptor that calculates BCUT properties");
    }
}
