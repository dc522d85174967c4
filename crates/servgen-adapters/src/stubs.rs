//! Bundled default stubs.
//!
//! These are the templates used when the project does not provide an
//! override under `<project>/stubs/`. Placeholder tokens use the
//! `{{ name }}` spelling; the renderer also accepts `{{name}}`.

use servgen_core::domain::StubKind;

/// Plain service class, no model reference.
pub const SERVICE_STUB: &str = r#"<?php

namespace {{ namespace }};

class {{ class }}
{
    //
}
"#;

/// Service class holding a constructor-injected model reference.
pub const SERVICE_MODEL_STUB: &str = r#"<?php

namespace {{ namespace }};

use {{ model }};

class {{ class }}
{
    /**
     * @var {{ upperModel }}
     */
    protected ${{ lowerModel }};

    public function __construct({{ upperModel }} ${{ lowerModel }})
    {
        $this->{{ lowerModel }} = ${{ lowerModel }};
    }
}
"#;

/// Bare model class.
pub const MODEL_STUB: &str = r#"<?php

namespace {{ namespace }};

class {{ class }}
{
    //
}
"#;

/// Matching test class skeleton.
pub const TEST_STUB: &str = r#"<?php

namespace {{ namespace }};

class {{ class }}
{
    public function test_example(): void
    {
        //
    }
}
"#;

/// The bundled stub text for a variant.
pub fn default_stub(kind: StubKind) -> &'static str {
    match kind {
        StubKind::Service => SERVICE_STUB,
        StubKind::ServiceWithModel => SERVICE_MODEL_STUB,
        StubKind::Model => MODEL_STUB,
        StubKind::Test => TEST_STUB,
    }
}
