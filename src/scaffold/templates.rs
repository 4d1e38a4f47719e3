//! Starter file bodies for a new component.

pub const HEADER: &str = r#"#ifndef ${module_upper}_${name_upper}_H_
#define ${module_upper}_${name_upper}_H_

#include "${module}/internal/base.h"

${module_upper}_NS_BEGIN

// TODO

${module_upper}_NS_END

#endif
"#;

pub const TEST: &str = r#"#include "gtest/gtest.h"
#include "${module}/${name}.h"

// using ${module}::;

TEST(${name}Test, Basic) {
    // TODO
}
"#;

pub const SOURCE: &str = r#"#include "${module}/${name}.h"

${module_upper}_NS_BEGIN

// TODO

${module_upper}_NS_END
"#;

pub const BENCHMARK: &str = r#"#include "${module}/util/io.h"
#include "${module}/util/timer.h"
#include "${module}/${name}.h"

// using ${module}::;

int main() {
    // TODO
    return 0;
}
"#;
