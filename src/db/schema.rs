//! Database schema and migrations for learnhub.
//!
//! Migrations are applied sequentially when the database is first opened or
//! upgraded. Reference data (course levels, categories, material types) is
//! seeded here so lookups never depend on an admin surface.

/// Database migrations.
///
/// Each migration is a SQL script executed in order; the schema_version table
/// tracks which ones have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Reference tables for courses
    r#"
CREATE TABLE course_levels (
    id      INTEGER PRIMARY KEY,
    name    TEXT NOT NULL UNIQUE
);

INSERT INTO course_levels (id, name) VALUES
    (1, 'Beginner'),
    (2, 'Intermediate'),
    (3, 'Advanced');

CREATE TABLE course_categories (
    id      TEXT PRIMARY KEY,
    name    TEXT NOT NULL UNIQUE
);

INSERT INTO course_categories (id, name) VALUES
    ('6f1c2a0e-0b1d-4c39-9a57-1f3e6d2b8c01', 'Technical'),
    ('6f1c2a0e-0b1d-4c39-9a57-1f3e6d2b8c02', 'Soft Skills'),
    ('6f1c2a0e-0b1d-4c39-9a57-1f3e6d2b8c03', 'Compliance');
"#,
    // v2: Courses
    r#"
CREATE TABLE courses (
    id              TEXT PRIMARY KEY,
    title           TEXT NOT NULL,
    level_id        INTEGER NOT NULL REFERENCES course_levels(id),
    category_id     TEXT NOT NULL REFERENCES course_categories(id),
    description     TEXT NOT NULL DEFAULT '',
    duration        INTEGER NOT NULL DEFAULT 0,     -- hours
    thumbnail       TEXT,                           -- stored file name
    is_active       INTEGER NOT NULL DEFAULT 1,
    is_available    INTEGER NOT NULL DEFAULT 1,
    created_by      TEXT NOT NULL,
    created_at      TEXT NOT NULL,
    modified_by     TEXT NOT NULL,
    modified_at     TEXT NOT NULL
);

-- Backstop for the check-then-insert race: one active course per title
CREATE UNIQUE INDEX idx_courses_active_title ON courses(title) WHERE is_active = 1;
CREATE INDEX idx_courses_level_id ON courses(level_id);
"#,
    // v3: Topics, material types and materials
    r#"
CREATE TABLE topics (
    id              TEXT PRIMARY KEY,
    course_id       TEXT NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
    name            TEXT NOT NULL,
    description     TEXT NOT NULL DEFAULT '',
    is_active       INTEGER NOT NULL DEFAULT 1,
    created_by      TEXT NOT NULL,
    created_at      TEXT NOT NULL
);

CREATE INDEX idx_topics_course_id ON topics(course_id);

CREATE TABLE material_types (
    id      TEXT PRIMARY KEY,
    name    TEXT NOT NULL UNIQUE
);

INSERT INTO material_types (id, name) VALUES
    ('9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a01', 'Video'),
    ('9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a02', 'Audio'),
    ('9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a03', 'Text'),
    ('9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a04', 'PDF'),
    ('9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a05', 'PPT');

CREATE TABLE materials (
    id                  TEXT PRIMARY KEY,
    topic_id            TEXT NOT NULL REFERENCES topics(id) ON DELETE CASCADE,
    material_type_id    TEXT NOT NULL REFERENCES material_types(id),
    name                TEXT NOT NULL,
    file_path           TEXT NOT NULL,              -- stored file name
    duration            INTEGER NOT NULL DEFAULT 0, -- minutes
    is_active           INTEGER NOT NULL DEFAULT 1,
    is_available        INTEGER NOT NULL DEFAULT 1,
    created_by          TEXT NOT NULL,
    created_at          TEXT NOT NULL,
    modified_by         TEXT NOT NULL,
    modified_at         TEXT NOT NULL
);

-- Backstop for the check-then-insert race: one active material per name in a topic
CREATE UNIQUE INDEX idx_materials_active_topic_name ON materials(topic_id, name) WHERE is_active = 1;
CREATE INDEX idx_materials_topic_type ON materials(topic_id, material_type_id);
"#,
];
