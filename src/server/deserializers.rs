use serde::{Deserialize, Deserializer};

pub fn first_page() -> i64 {
    1
}

// `?page=abc` is treated as no page at all
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_else(first_page))
}

/// Category ids arrive as `1` from some frontend forms and as `"1"` from others.
/// They are kept apart until validated, since `0` and `""` are both "missing".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrText {
    Int(i64),
    Text(String),
}

impl IntOrText {
    /// Text form as stored in `questions.category`.
    pub fn into_text(self) -> String {
        match self {
            IntOrText::Int(i) => i.to_string(),
            IntOrText::Text(s) => s,
        }
    }

    /// Like [`Self::into_text`], but `0` and the empty string give `None`.
    pub fn into_truthy_text(self) -> Option<String> {
        match self {
            IntOrText::Int(0) => None,
            IntOrText::Text(s) if s.is_empty() => None,
            other => Some(other.into_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct Page {
        #[serde(default = "first_page", deserialize_with = "deserialize_page")]
        page: i64,
    }

    fn category(value: serde_json::Value) -> IntOrText {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn page_defaults_to_first() {
        let page: Page = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page.page, 1);
        let page: Page = serde_json::from_value(json!({ "page": "abc" })).unwrap();
        assert_eq!(page.page, 1);
        let page: Page = serde_json::from_value(json!({ "page": "3" })).unwrap();
        assert_eq!(page.page, 3);
        let page: Page = serde_json::from_value(json!({ "page": "-2" })).unwrap();
        assert_eq!(page.page, -2);
    }

    #[test]
    fn category_accepts_numbers_and_text() {
        assert_eq!(category(json!(4)), IntOrText::Int(4));
        assert_eq!(category(json!("4")).into_text(), "4");
        assert_eq!(category(json!(4)).into_text(), "4");
        assert!(serde_json::from_value::<IntOrText>(json!([1])).is_err());
    }

    #[test]
    fn zero_and_empty_categories_are_falsy() {
        assert_eq!(category(json!(0)).into_truthy_text(), None);
        assert_eq!(category(json!("")).into_truthy_text(), None);
        assert_eq!(category(json!("0")).into_truthy_text().as_deref(), Some("0"));
        assert_eq!(category(json!(3)).into_truthy_text().as_deref(), Some("3"));
    }
}
