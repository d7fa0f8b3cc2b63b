mod builder;
pub use builder::TypeInfoBuilder;

mod cache;
pub use cache::TypeInfoCache;

mod column;
pub use column::ColumnInfo;

mod type_info;
pub use type_info::TypeInfo;
