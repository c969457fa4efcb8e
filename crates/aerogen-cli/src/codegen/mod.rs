//! C# code generation from the aerogen intermediate representation.
//!
//! The core crate turns field-definition CSVs into [`SectionModel`]s and
//! [`DomainModel`]s; this module only prints them.
//!
//! # Supported Generators
//!
//! - **CIFP**: a record class and a line parser per fixed-width section
//! - **NASR**: a models file, a parser file and a driver snippet per CSV domain
//! - **Report**: `Duplicates.txt`, the columns renamed to avoid collisions
//!
//! # Architecture
//!
//! ```text
//! Section CSV            Domain directory
//!     ↓                        ↓
//!  [aerogen_core::section]  [aerogen_core::domain]
//!     ↓                        ↓
//!  SectionModel            DomainModel
//!     ↓                        ↓
//!  [cifp]                   [nasr] + [report]
//!     ↓                        ↓
//!  *CifpDataModel.cs        *Models.cs, *Parser.cs,
//!  *CifpParser.cs           Program.cs, Duplicates.txt
//! ```
//!
//! Generators are pure functions returning text. Nothing is written until
//! every file of a run has been generated (see [`crate::output`]).
//!
//! # Usage
//!
//! ```bash
//! aerogen cifp AIRPORT.csv --section-name Airport --section-id PA
//! aerogen nasr --dir ./APT_CSV --common-fields EFF_DATE,SITE_NO
//! ```
//!
//! [`SectionModel`]: aerogen_core::SectionModel
//! [`DomainModel`]: aerogen_core::DomainModel

pub mod cifp;
pub mod csharp_types;
pub mod nasr;
pub mod report;
