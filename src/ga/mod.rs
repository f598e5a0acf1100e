//! Genetic search with a mu+lambda survivor model.
//!
//! Chromosome = tour, fitness = cycle cost (minimization). Each
//! generation selects parent pairs, recombines them with a
//! permutation-preserving crossover, mutates offspring by index
//! shuffling, and keeps the best `mu` individuals of the combined
//! parents-plus-offspring pool — the incumbent best is never lost.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population sizing, rates, strategy selection
//! - [`Selection`]: tournament or roulette parent selection
//! - [`Crossover`]: order (OX) or partially matched (PMX) recombination
//! - [`GaRunner`] / [`GaResult`]: execution and outcome
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Beyer & Schwefel (2002), "Evolution Strategies — A Comprehensive Introduction"

mod config;
mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use operators::Crossover;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
