mod catalog;
mod common;
mod criteria;
mod verdict;
