use once_cell::sync::Lazy;
use prost_reflect::{DescriptorPool, MessageDescriptor};
use prost_types::FileDescriptorProto;

use super::{schema, Error};

static LOGGING: Lazy<DescriptorPool> = Lazy::new(|| {
    DescriptorPool::from_file_descriptor_set(schema::logging_files())
        .expect("descriptors of the logging messages to be valid")
});

/// Message types the JSON mapping knows, keyed by their full name
///
/// A registry always holds the messages of the logging API and the well-known
/// types they use. `Any` payloads of any other type resolve only after the file
/// defining the type is added.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    pool: DescriptorPool,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            pool: LOGGING.clone(),
        }
    }

    /// Add the messages of a file. Files it imports must be known already.
    pub fn add_file(&mut self, file: FileDescriptorProto) -> Result<&mut Self, Error> {
        self.pool.add_file_descriptor_proto(file)?;

        Ok(self)
    }

    /// Add the files of an encoded `FileDescriptorSet`, as written by
    /// `protoc --descriptor_set_out`
    pub fn add_file_descriptor_set(&mut self, bytes: &[u8]) -> Result<&mut Self, Error> {
        self.pool.decode_file_descriptor_set(bytes)?;

        Ok(self)
    }

    /// Whether payloads with this type url can be resolved
    pub fn contains(&self, type_url: &str) -> bool {
        self.pool.get_message_by_name(type_name(type_url)).is_some()
    }

    pub fn pool(&self) -> &DescriptorPool {
        &self.pool
    }

    pub(crate) fn message(&self, name: &str) -> Result<MessageDescriptor, Error> {
        self.pool
            .get_message_by_name(name)
            .ok_or_else(|| Error::UnknownMessage(name.to_string()))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything up to the last `/` of a type url is ignored
pub(crate) fn type_name(type_url: &str) -> &str {
    type_url.rsplit('/').next().unwrap_or(type_url)
}
