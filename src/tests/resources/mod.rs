mod host_tests;
