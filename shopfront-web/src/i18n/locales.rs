use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

/// Language used when the page declares none we ship.
pub const DEFAULT_LANG: &str = "id";

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "id",
        name: "Bahasa Indonesia",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("id", include_str!("../../i18n/id.json")),
    ("en", include_str!("../../i18n/en.json")),
];

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        if let Value::Object(map) = value {
            for (k, v) in map {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                keys(v, &path, out);
            }
        } else {
            out.push(prefix.to_string());
        }
    }

    #[test]
    fn every_locale_defines_the_same_keys() {
        let mut reference = Vec::new();
        keys(&load_translations(DEFAULT_LANG).unwrap(), "", &mut reference);
        reference.sort();
        for meta in LOCALE_META {
            let mut found = Vec::new();
            keys(&load_translations(meta.code).unwrap(), "", &mut found);
            found.sort();
            assert_eq!(found, reference, "locale {} is out of sync", meta.code);
        }
    }

    #[test]
    fn unknown_locale_loads_default_table() {
        assert!(!is_supported("xx"));
        assert_eq!(load_translations("xx"), load_translations(DEFAULT_LANG));
    }
}
