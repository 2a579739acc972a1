use text_block_macros::text_block_fnl;

/// One regular dependency and one dev dependency.
pub const LODASH_AND_MOCHA: &str = text_block_fnl! {
    "{"
    "  \"name\": \"have-it-fixture\","
    "  \"dependencies\": {"
    "    \"lodash\": \"^4.0.0\""
    "  },"
    "  \"devDependencies\": {"
    "    \"mocha\": \"^9.0.0\""
    "  }"
    "}"
};

/// A few of each, including a scoped package.
pub const MIXED_DEPENDENCIES: &str = text_block_fnl! {
    "{"
    "  \"name\": \"have-it-mixed\","
    "  \"version\": \"1.0.0\","
    "  \"dependencies\": {"
    "    \"debug\": \"^2.0.0\","
    "    \"@types/node\": \"^18.7.19\","
    "    \"ramda\": \"^0.28.0\""
    "  },"
    "  \"devDependencies\": {"
    "    \"mocha\": \"^9.0.0\","
    "    \"chai\": \"^4.0.0\""
    "  }"
    "}"
};
