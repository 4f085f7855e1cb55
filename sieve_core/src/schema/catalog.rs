//! Builtin field catalog for the employee directory

use super::{FieldDefinition, FieldType, Operator};

pub(super) fn employee_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("name", FieldType::Text),
        FieldDefinition::new("email", FieldType::Text).with_operators(vec![
            Operator::Contains,
            Operator::Equals,
            Operator::EndsWith,
            Operator::Regex,
        ]),
        FieldDefinition::new("department", FieldType::SingleSelect).with_options(&[
            ("Engineering", "Engineering"),
            ("Sales", "Sales"),
            ("Marketing", "Marketing"),
            ("Finance", "Finance"),
            ("Human Resources", "HR"),
        ]),
        FieldDefinition::new("role", FieldType::SingleSelect).with_options(&[
            ("Individual Contributor", "IC"),
            ("Manager", "Manager"),
            ("Director", "Director"),
        ]),
        FieldDefinition::new("salary", FieldType::Number),
        FieldDefinition::new("bonus", FieldType::Amount),
        FieldDefinition::new("start_date", FieldType::Date),
        FieldDefinition::new("skills", FieldType::MultiSelect).with_options(&[
            ("React", "React"),
            ("TypeScript", "TypeScript"),
            ("Rust", "Rust"),
            ("Python", "Python"),
            ("AWS", "AWS"),
            ("SQL", "SQL"),
        ]),
        FieldDefinition::new("remote", FieldType::Boolean).with_label("Works Remotely"),
        FieldDefinition::new("active", FieldType::Boolean),
        FieldDefinition::new("city", FieldType::Text)
            .with_operators(vec![
                Operator::Equals,
                Operator::Contains,
                Operator::StartsWith,
            ])
            .with_nested_path("address.city"),
        FieldDefinition::new("country", FieldType::SingleSelect)
            .with_options(&[
                ("United States", "US"),
                ("United Kingdom", "UK"),
                ("Germany", "DE"),
                ("Canada", "CA"),
            ])
            .with_nested_path("address.country"),
    ]
}
