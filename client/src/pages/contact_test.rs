use super::*;

#[test]
fn only_message_renders_as_textarea() {
    assert_eq!(input_type(ContactField::Message), None);
    assert_eq!(input_type(ContactField::Email), Some("email"));
    assert_eq!(input_type(ContactField::Name), Some("text"));
    assert_eq!(input_type(ContactField::Subject), Some("text"));
}

#[test]
fn every_field_has_a_distinct_label() {
    let labels: Vec<_> = ContactField::ALL.iter().map(|f| field_label(*f)).collect();
    for (i, label) in labels.iter().enumerate() {
        assert!(!label.is_empty());
        assert!(!labels[i + 1..].contains(label));
    }
}
