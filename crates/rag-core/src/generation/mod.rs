//! Generation module - Section planning, speculative drafting, and assembly
//!
//! Control flow for one topic:
//!
//! ```text
//! topic ─► SectionPlanner ─► [section, ...]
//!                               │  (sequential, in planned order)
//!                               ▼
//!          SpeculativeSectionPipeline: embed query ─► retrieve ─► pack ─► fast draft
//!                                      embed draft ─► retrieve ─► accurate refine
//!                               │
//!                               ▼
//!          ArticleAssembler ─► "## {section}\n\n{content}" blocks
//! ```

pub mod assembler;
pub mod pipeline;
pub mod planner;
pub mod prompts;

pub use assembler::ArticleAssembler;
pub use pipeline::{Draft, SpeculativeSectionPipeline};
pub use planner::{parse_section_plan, ParseOutcome, SectionPlanner, DEFAULT_SECTIONS};
