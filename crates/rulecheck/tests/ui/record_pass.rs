use nebula_rulecheck::{FailureKind, Record};

#[derive(Record)]
pub struct Account {
    #[validate(rule = "len:36", name = "ID")]
    pub id: String,

    #[validate(rule = "min:18|max:50")]
    pub age: u8,

    #[validate(rule = "in:admin,stuff")]
    #[validate(name = "Role")]
    pub role: String,

    #[validate(rule = r"regexp:^\+?\d{11}$")]
    pub phones: Vec<String>,

    #[validate(rule = "len:5")]
    pub r#type: String,

    pub notes: Vec<f64>,
}

fn main() {
    let account = Account {
        id: "x".into(),
        age: 30,
        role: "admin".into(),
        phones: vec!["79998886655".into()],
        r#type: "basic".into(),
        notes: Vec::new(),
    };

    let err = account.validate().unwrap_err();
    let report = err.report().unwrap();
    assert_eq!(report.kinds(), [("ID", FailureKind::LengthMismatch)]);
}
