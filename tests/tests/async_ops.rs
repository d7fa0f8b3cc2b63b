use pretty_assertions::assert_eq;
use rowmap::{Dialect, GetListExt, ModelExt, Params, Row};
use tests::{
    models::{Order, OrderLine, Person},
    person_row, EngineError, MockConnection, MockTransaction, Response,
};

use std::{sync::Arc, time::Duration};

#[tokio::test]
async fn get_list_async() {
    tests::init_tracing();
    let conn = MockConnection::new(Dialect::Ansi);
    conn.respond_rows(vec![person_row(1, "Alice"), person_row(2, "Bob")]);

    let people = conn
        .get_list::<Person>()
        .filter("Name LIKE @p")
        .params(Params::new().bind("p", "A%"))
        .all_async()
        .await
        .unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(conn.last().sql, "SELECT Id,Name FROM People WHERE Name LIKE @p");
}

#[tokio::test]
async fn cursor_loads_lazily() {
    let conn = MockConnection::new(Dialect::Ansi);
    conn.respond_rows(vec![
        person_row(1, "Alice"),
        Row::new().with("Id", "broken").with("Name", "Bob"),
    ]);

    let mut cursor = conn.get_list::<Person>().cursor().await.unwrap();

    let first = cursor.next().await.unwrap().unwrap();
    assert_eq!(first.Name, "Alice");

    let second = cursor.next().await.unwrap();
    assert_eq!(
        second.unwrap_err().to_string(),
        "failed to load field `Id` of `Person`: cannot convert String to i64"
    );
    assert!(cursor.next().await.is_none());
}

#[tokio::test]
async fn map_async_with_options() {
    let conn = MockConnection::new(Dialect::Ansi);
    let tx = MockTransaction::new("async-tx");
    conn.respond_rows(vec![person_row(1, "Alice")]);

    let names = conn
        .get_list::<Person>()
        .transaction(&tx)
        .timeout(Duration::from_secs(2))
        .map_async(|person| person.Name.to_uppercase())
        .await
        .unwrap();

    assert_eq!(names, vec!["ALICE"]);

    let command = conn.last();
    assert_eq!(command.transaction.as_deref(), Some("async-tx"));
    assert_eq!(command.timeout, Some(Duration::from_secs(2)));
}

#[tokio::test]
async fn multi_type_async() {
    let conn = MockConnection::new(Dialect::Ansi);
    conn.respond_rows(vec![Row::new()
        .with("Id", 5i64)
        .with("Customer", "acme")
        .with("Id", 50i64)
        .with("OrderId", 5i64)
        .with("Sku", "Z")
        .with("Quantity", 1i64)]);

    let orders = conn
        .get_list_multi::<(Order, OrderLine)>("SELECT ...")
        .all_async()
        .await
        .unwrap();

    assert_eq!(orders[0].Id, 5);
    assert_eq!(conn.last().split_on, Some(vec!["Id".to_string()]));
}

#[tokio::test]
async fn crud_async() {
    let conn = MockConnection::new(Dialect::Ansi);
    let alice = Person {
        Id: 1,
        Name: "Alice".into(),
    };

    conn.respond(Response::Affected(1));
    conn.respond_rows(vec![person_row(1, "Alice")]);
    conn.respond(Response::Affected(1));
    conn.respond_rows(vec![Row::new().with("count", 1i64)]);
    conn.respond_rows(vec![person_row(1, "Alice")]);
    conn.respond(Response::Affected(1));
    conn.respond(Response::Affected(0));

    assert!(conn.insert_async(&alice).await.unwrap());
    assert_eq!(conn.get_async::<Person>(1i64).await.unwrap(), Some(alice.clone()));
    assert!(conn.update_async(&alice).await.unwrap());
    assert_eq!(conn.count_async::<Person>(None, &Params::new()).await.unwrap(), 1);
    assert_eq!(
        conn.get_page_async::<Person>(Some("ORDER BY Id"), &Params::new(), 1, 5)
            .await
            .unwrap(),
        vec![alice.clone()]
    );
    assert!(conn.delete_async(&alice).await.unwrap());
    assert_eq!(
        conn.delete_list_async::<Person>(Some("Id > @id"), &Params::new().bind("id", 1i64))
            .await
            .unwrap(),
        0
    );

    assert_eq!(
        conn.statements(),
        vec![
            "INSERT INTO People (Id,Name) VALUES (@Id,@Name)",
            "SELECT Id,Name FROM People WHERE Id=@Id",
            "UPDATE People SET Name=@Name WHERE Id=@Id",
            "SELECT COUNT(*) FROM People",
            "SELECT Id,Name FROM People ORDER BY Id OFFSET 0 ROWS FETCH NEXT 5 ROWS ONLY",
            "DELETE FROM People WHERE Id=@Id",
            "DELETE FROM People WHERE Id > @id",
        ]
    );
}

#[tokio::test]
async fn async_engine_error_passthrough() {
    let conn = MockConnection::new(Dialect::Ansi);
    conn.respond(Response::Fail(EngineError::new(-4, "timeout expired")));

    let err = conn.get_list::<Person>().all_async().await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(
        err.driver_error()
            .and_then(|err| err.downcast_ref::<EngineError>())
            .map(|err| err.code),
        Some(-4)
    );
}

#[tokio::test]
async fn queries_run_from_spawned_tasks() {
    let conn = Arc::new(MockConnection::new(Dialect::Ansi));

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let conn = conn.clone();
            tokio::spawn(async move {
                conn.get_async::<Person>(i as i64).await.unwrap();
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(conn.log().len(), 8);
}
