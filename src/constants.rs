//! Common constants used throughout the ezpresso application.

/// Environment variable pointing at the template pack directory
pub const TEMPLATES_ENV_VAR: &str = "EZPRESSO_TEMPLATES";

/// Default template pack directory name, resolved next to the executable
pub const TEMPLATES_DIR: &str = "templates";

/// Default stack subtree inside the template pack
pub const DEFAULT_STACK: &str = "typescript/express";

/// Manifest file written at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Source directory of a scaffolded project
pub const SOURCE_DIR: &str = "src";

/// File extension of generated artifacts
pub const ARTIFACT_EXT: &str = "ts";

/// Directory skeleton created at bootstrap, in creation order
pub const SKELETON_DIRS: [&str; 8] = [
    "src",
    "src/controllers",
    "src/db",
    "src/logger",
    "src/middleware",
    "src/models",
    "src/services",
    "src/utils",
];

/// Static files copied verbatim from the stack subtree at bootstrap,
/// as (template file, project-relative destination) pairs
pub const STATIC_FILES: [(&str, &str); 9] = [
    (".env", ".env"),
    (".gitignore", ".gitignore"),
    ("nodemon.json", "nodemon.json"),
    ("tsconfig.json", "tsconfig.json"),
    ("db.txt", "src/db/connect.ts"),
    ("logger.txt", "src/logger/index.ts"),
    ("app.txt", "src/app.ts"),
    ("routes.txt", "src/routes.ts"),
    ("utils.txt", "src/utils/index.ts"),
];
