// Token counting: tokenization, ranking, and the on-disk frequency table.

pub mod ranking;
pub mod table;
pub mod tokenizer;
