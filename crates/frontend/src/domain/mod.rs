pub mod a001_client;
pub mod a002_product;
pub mod a003_furniture_type;
pub mod a004_sales_record;
