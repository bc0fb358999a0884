pub mod weapon;
