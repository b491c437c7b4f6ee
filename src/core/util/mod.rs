pub mod partition_columns;
