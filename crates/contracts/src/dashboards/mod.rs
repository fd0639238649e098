pub mod d410_product_tickets;
