use serde_json::Value;

/// What a page wants the document head to say about it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub canonical: Option<String>,
    pub noindex: bool,
    pub structured_data: Vec<Value>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical = Some(url.into());
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }

    /// Accepts one JSON-LD object or an array of them.
    pub fn structured_data(mut self, value: Value) -> Self {
        self.structured_data.extend(normalize_structured_data(value));
        self
    }
}

pub fn normalize_structured_data(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_object_and_array_both_become_sequences() {
        let one = json!({"@type": "Organization"});
        assert_eq!(normalize_structured_data(one.clone()), vec![one]);

        let many = json!([{"@type": "Organization"}, {"@type": "WebSite"}]);
        assert_eq!(normalize_structured_data(many).len(), 2);
        assert!(normalize_structured_data(Value::Null).is_empty());
    }

    #[test]
    fn builder_accumulates_structured_data() {
        let meta = PageMeta::new("Contact", "Get in touch")
            .keywords("ict, support")
            .noindex()
            .structured_data(json!({"@type": "Organization"}))
            .structured_data(json!([{"@type": "ContactPage"}]));

        assert_eq!(meta.keywords.as_deref(), Some("ict, support"));
        assert!(meta.noindex);
        assert_eq!(meta.canonical, None);
        assert_eq!(meta.structured_data.len(), 2);
    }
}
