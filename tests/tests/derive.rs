use pretty_assertions::assert_eq;
use rowmap::{ColumnInfo, Dialect, GetListExt, Model, ModelExt, Row, TypeInfo, Value};
use tests::{MockConnection, Response};

#[derive(Debug, PartialEq, Model)]
#[table = "dbo.Invoices"]
struct Invoice {
    #[key]
    #[auto]
    id: i64,

    #[column("customer_name")]
    customer: String,

    #[computed]
    total: f64,

    note: Option<String>,

    #[skip]
    cached: Vec<u8>,
}

#[allow(non_snake_case)]
#[derive(Debug, PartialEq, Model)]
struct Tag {
    r#type: String,
    ID: i32,
}

#[test]
fn describe_follows_attributes() {
    assert_eq!(
        Invoice::describe(),
        TypeInfo::builder("Invoice")
            .table("dbo.Invoices")
            .column(ColumnInfo::new("id").key().auto())
            .column(ColumnInfo::new("customer").column("customer_name"))
            .column(ColumnInfo::new("total").computed())
            .column(ColumnInfo::new("note"))
            .column(ColumnInfo::new("cached").ignored())
            .build()
    );
}

#[test]
fn conventional_key_and_default_table() {
    let info = Tag::describe();

    assert_eq!(info.table(), "Tag");
    assert_eq!(info.columns[0].field, "type");
    assert_eq!(info.key_column().unwrap().field, "ID");
}

#[test]
fn load_reads_aliased_columns_and_defaults_skipped_fields() {
    let row = Row::new()
        .with("id", 9i64)
        .with("customer", "Acme")
        .with("total", 12.5)
        .with("note", Value::Null);

    assert_eq!(
        Invoice::load(row).unwrap(),
        Invoice {
            id: 9,
            customer: "Acme".into(),
            total: 12.5,
            note: None,
            cached: vec![],
        }
    );

    // Rows keyed by column name load too
    let row = Row::new()
        .with("id", 9i64)
        .with("customer_name", "Acme")
        .with("total", 0i64)
        .with("note", "rush");

    let invoice = Invoice::load(row).unwrap();
    assert_eq!(invoice.customer, "Acme");
    assert_eq!(invoice.total, 0.0);
    assert_eq!(invoice.note.as_deref(), Some("rush"));
}

#[test]
fn to_params_binds_mapped_fields() {
    let invoice = Invoice {
        id: 3,
        customer: "Acme".into(),
        total: 1.5,
        note: None,
        cached: vec![1, 2, 3],
    };

    let params = invoice.to_params();

    assert_eq!(params.len(), 4);
    assert_eq!(params.get("id"), Some(&Value::I64(3)));
    assert_eq!(params.get("customer"), Some(&Value::from("Acme")));
    assert_eq!(params.get("note"), Some(&Value::Null));
    assert_eq!(params.get("cached"), None);
}

#[test]
fn generated_statements() {
    let conn = MockConnection::new(Dialect::SqlServer);
    conn.respond_rows(vec![]);
    conn.respond(Response::Affected(1));
    conn.respond(Response::Affected(1));

    conn.get_list::<Invoice>().all().unwrap();
    conn.insert(&Invoice {
        id: 0,
        customer: "Acme".into(),
        total: 0.0,
        note: None,
        cached: vec![],
    })
    .unwrap();
    conn.update(&Invoice {
        id: 4,
        customer: "Acme".into(),
        total: 0.0,
        note: Some("paid".into()),
        cached: vec![],
    })
    .unwrap();

    assert_eq!(
        conn.statements(),
        vec![
            "SELECT [id],[customer_name] AS [customer],[total],[note] FROM [dbo].[Invoices]",
            "INSERT INTO [dbo].[Invoices] ([customer_name],[note]) VALUES (@customer,@note)",
            "UPDATE [dbo].[Invoices] SET [customer_name]=@customer,[note]=@note WHERE [id]=@id",
        ]
    );
}
