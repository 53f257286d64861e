use jsontable::builder::QueryBuilder;
use jsontable::prelude::*;

fn products() -> JsonTableResult<Sql> {
    let table = JsonTable::new("p.attributes", PathExpression::new("$.sizes[*]")?).columns(
        ColumnList::new(vec![Column::new("size", "TEXT")
            .path(PathExpression::new("$")?)
            .into()])?,
    );

    let mut builder = QueryBuilder::new();
    builder
        .push("SELECT p.name, jt.size FROM products p, ")
        .push_node(&table)
        .push(" AS jt");
    Ok(builder.finish())
}

fn main() {
    let sql = products().unwrap();
    assert_eq!(
        sql.to_string(),
        "SELECT p.name, jt.size FROM products p, \
         JSON_TABLE (p.attributes, '$.sizes[*]' COLUMNS (size TEXT PATH '$')) AS jt"
    );
}
