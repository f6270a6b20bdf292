mod memory_descriptor_store;

pub use memory_descriptor_store::MemoryDescriptorStore;
