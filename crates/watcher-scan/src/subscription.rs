use serde::Serialize;
use serde_json::Value;

/// One field of the subscription form the host renders at subscribe time
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: Value,
}

/// The watcher needs no user input beyond the subscription itself, so the
/// form is a single hidden field that keeps the host's Subscribe button shown.
pub fn subscription_form() -> Vec<FormField> {
    vec![FormField {
        id: "allow-subscribe".to_string(),
        label: "This input makes sure the Subscribe button will be shown".to_string(),
        field_type: "hidden".to_string(),
        value: Value::Bool(true),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_serializes_with_host_field_names() {
        let form = subscription_form();
        assert_eq!(form.len(), 1);

        let json = serde_json::to_value(&form[0]).unwrap();
        assert_eq!(json["id"], "allow-subscribe");
        assert_eq!(json["type"], "hidden");
        assert_eq!(json["value"], true);
    }
}
