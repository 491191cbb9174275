/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for reading radial functions from text files

/// Options for [`RadialFunction::from_file`](super::RadialFunction::from_file)
#[derive(Debug, Clone)]
pub struct RadialFileConfig {
    /// Name given to the function, defaults to the file path
    pub name: Option<String>,
    /// Column holding the radial mesh
    pub mesh_column: usize,
    /// Column holding the function values
    pub value_column: usize,
    /// Lines starting with this character are skipped
    pub comment: char,
}

impl Default for RadialFileConfig {
    fn default() -> Self {
        Self {
            name: None,
            mesh_column: 0,
            value_column: 1,
            comment: '#',
        }
    }
}

impl RadialFileConfig {
    /// Read the mesh and the values from the given columns
    pub fn with_columns(mesh_column: usize, value_column: usize) -> Self {
        Self {
            mesh_column,
            value_column,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
