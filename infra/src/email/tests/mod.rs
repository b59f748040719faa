mod mail_tests;
