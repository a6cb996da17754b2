pub mod record_id;
