mod descriptor_store;

pub use descriptor_store::DescriptorStore;
