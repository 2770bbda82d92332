mod embedding;
mod partitioner;

pub use embedding::ITextEmbedder;
pub use partitioner::IGraphPartitioner;
