mod params;
pub use params::Params;

mod primitive;
pub use primitive::Primitive;

mod row;
pub use row::Row;

mod row_stream;
pub use row_stream::RowStream;

mod value;
pub use value::Value;
