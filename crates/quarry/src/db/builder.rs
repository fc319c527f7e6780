use super::Db;
use crate::{driver::Driver, Config, Layout, Result, Schema};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Layouts registered so far, in registration order
    layouts: Vec<Layout>,

    config: Config,
}

impl Builder {
    pub fn register(&mut self, layout: Layout) -> &mut Self {
        self.layouts.push(layout);
        self
    }

    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Builds the schema from the registered layouts. Fails if two layouts
    /// share a name.
    pub fn build_schema(&self) -> Result<Schema> {
        let mut schema = Schema::new();
        for layout in &self.layouts {
            schema.register(layout.clone())?;
        }
        Ok(schema)
    }

    pub fn build(&self, driver: impl Driver + 'static) -> Result<Db> {
        Ok(Db {
            driver: Arc::new(driver),
            schema: Arc::new(self.build_schema()?),
            serializer: self.config.serializer(),
            config: self.config.clone(),
        })
    }
}
