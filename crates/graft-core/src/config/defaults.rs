//! Default values for graft configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Taxonomy Defaults
// ============================================================================

/// Default checkout of the taxonomy repository.
pub const DEFAULT_TAXONOMY_ROOT: &str = ".";

/// Default revision the taxonomy is read at.
pub const DEFAULT_TAXONOMY_VERSION: &str = "main";

/// Path of the generated nested taxonomy inside the repository.
pub const DEFAULT_NESTED_PATH: &str = "generated/ecs/ecs_nested.yml";

// ============================================================================
// Report Defaults
// ============================================================================

/// Leave group fields out of the batch report.
pub const DEFAULT_SKIP_GROUPS: bool = true;

/// Leave externally typed fields out of the batch report.
pub const DEFAULT_SKIP_EXTERNAL: bool = true;

// ============================================================================
// Logging Defaults
// ============================================================================

/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "graft=info";

// ============================================================================
// File Locations
// ============================================================================

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "graft.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "graft";

/// User config file name.
pub const USER_CONFIG_FILE: &str = "config.toml";
