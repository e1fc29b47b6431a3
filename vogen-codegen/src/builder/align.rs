//! Column alignment matching gofmt.

/// Align two-column rows the way gofmt aligns struct fields and keyed
/// composite literal elements.
///
/// The first column is padded with spaces to the widest entry plus one, so
/// `[("ID", "int"), ("Name", "string")]` renders as `ID   int` and
/// `Name string`. A row with an empty second column is left unpadded.
pub fn align_pairs<K, V>(rows: &[(K, V)]) -> Vec<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let width = rows
        .iter()
        .map(|(key, _)| key.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(key, value)| {
            let (key, value) = (key.as_ref(), value.as_ref());
            if value.is_empty() {
                key.to_string()
            } else {
                let pad = width - key.chars().count() + 1;
                format!("{}{}{}", key, " ".repeat(pad), value)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_struct_fields() {
        let rows = [("Number", "*AddressNumber"), ("City", "*AddressCity")];
        assert_eq!(
            align_pairs(&rows),
            vec!["Number *AddressNumber", "City   *AddressCity"]
        );
    }

    #[test]
    fn test_align_keyed_literal() {
        let rows = [
            ("Number:", "vogenNumber,"),
            ("City:", "vogenCity,"),
            ("Country:", "vogenCountry,"),
        ];
        assert_eq!(
            align_pairs(&rows),
            vec![
                "Number:  vogenNumber,",
                "City:    vogenCity,",
                "Country: vogenCountry,"
            ]
        );
    }

    #[test]
    fn test_align_empty() {
        let rows: [(&str, &str); 0] = [];
        assert!(align_pairs(&rows).is_empty());
    }
}
