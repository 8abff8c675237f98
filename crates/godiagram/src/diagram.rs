//! Entry points: build a model, then render it.

use crate::classify::classify;
use crate::config::RenderingOptions;
use crate::model::Relations;
use crate::package_graph::PackageGraph;
use crate::render::{ClassRenderer, PackageRenderer};
use crate::Result;
use godiagram_api::{LoadOptions, PackageLoader, SemanticPackage};
use log::info;

/// Type-level diagram of a classified relation model
#[derive(Debug, Clone)]
pub struct ClassDiagram {
    relations: Relations,
    options: RenderingOptions,
}

impl ClassDiagram {
    /// Wrap an already classified model
    pub fn new(relations: Relations, options: RenderingOptions) -> Self {
        Self { relations, options }
    }

    /// Extract and classify semantic packages
    pub fn from_packages(packages: &[SemanticPackage], options: RenderingOptions) -> Self {
        Self::new(classify(&Relations::from_packages(packages)), options)
    }

    /// Load packages through `loader`, then extract and classify them
    pub fn load(
        loader: &dyn PackageLoader,
        load_options: &LoadOptions,
        options: RenderingOptions,
    ) -> Result<Self> {
        Ok(Self::new(Relations::load(loader, load_options)?, options))
    }

    /// The relation model
    pub fn relations(&self) -> &Relations {
        &self.relations
    }

    /// The rendering options
    pub fn options(&self) -> &RenderingOptions {
        &self.options
    }

    /// Render as PlantUML
    pub fn render(&self) -> String {
        let output = ClassRenderer::new(&self.relations, &self.options).render();
        info!(
            "Rendered class diagram of {} packages and {} types",
            self.relations.package_count(),
            self.relations.entity_count()
        );
        output
    }
}

/// Package-level import diagram
#[derive(Debug, Clone)]
pub struct PackageDiagram {
    graph: PackageGraph,
    options: RenderingOptions,
}

impl PackageDiagram {
    /// Wrap a package graph
    pub fn new(graph: PackageGraph, options: RenderingOptions) -> Self {
        Self { graph, options }
    }

    /// Build the import graph of semantic packages
    pub fn from_packages(packages: &[SemanticPackage], options: RenderingOptions) -> Self {
        Self::new(
            PackageGraph::from_relations(&Relations::from_packages(packages)),
            options,
        )
    }

    /// Load packages through `loader` and build their import graph
    pub fn load(
        loader: &dyn PackageLoader,
        load_options: &LoadOptions,
        options: RenderingOptions,
    ) -> Result<Self> {
        let packages = loader.load(load_options)?;
        Ok(Self::from_packages(&packages, options))
    }

    /// The import graph
    pub fn graph(&self) -> &PackageGraph {
        &self.graph
    }

    /// Render as PlantUML
    pub fn render(&self) -> String {
        let output = PackageRenderer::new(&self.graph, &self.options).render();
        info!(
            "Rendered package diagram of {} packages and {} imports",
            self.graph.package_count(),
            self.graph.edge_count()
        );
        output
    }
}
