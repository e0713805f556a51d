pub mod d400_chargeback_stats;
