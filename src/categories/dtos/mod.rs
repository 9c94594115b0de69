pub mod category_dto;
