pub mod orange_cycle;
