pub mod transaction_dto;
