/*
Generators for the precomputed tables of the ultimate tic-tac-toe engine:
the multiply-and-mask magic that indexes single 3x3 block states, and the
512-bit win table indexed by one side's block occupancy.
*/
pub mod board;
pub mod format;
pub mod magic;
pub mod win;
