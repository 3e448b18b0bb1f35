// Prompt templates for section drafting.
// Placeholders: {persona} and {sources_only} come from llm_client::prompts,
// {title} is the resolved section title, {references} is the user's raw text.

/// Introduction prompt. Replace: {persona}, {sources_only}, {references}
pub const INTRODUCTION_PROMPT_TEMPLATE: &str = r#"{persona} مهمتك كتابة مقدمة بحث أكاديمي باللغة العربية حول موضوع "الاتفاقية الجماعية والعلاقات المهنية".

المقدمة يجب أن تكون صفحتين وتتضمن:
1. تمهيد عام حول أهمية الموضوع
2. إشكالية البحث
3. أهداف الدراسة
4. أهمية الدراسة
5. منهج البحث
6. خطة البحث (الفصول والمباحث)

استخدم المراجع التالية:
{references}

الشروط المطلوبة:
- الكتابة باللغة العربية الفصحى
- استخدام أسلوب أكاديمي رصين
- الطول: حوالي 800-1000 كلمة (صفحتين)
- التهميش بأسلوب APA في نهاية النص
{sources_only}"#;

/// Sub-section (مطلب) prompt, 3000-3500 words.
/// Replace: {persona}, {sources_only}, {title}, {references}
pub const SUBSECTION_PROMPT_TEMPLATE: &str = r#"{persona} مهمتك كتابة قسم من بحث أكاديمي باللغة العربية.

العنوان: {title}

استخدم المراجع التالية:
{references}

الشروط المطلوبة:
- الكتابة باللغة العربية الفصحى
- استخدام أسلوب أكاديمي رصين ومتخصص
- الطول: 3000-3500 كلمة (حوالي 8 صفحات)
- تقسيم المحتوى إلى فقرات منطقية
- استخدام عناوين فرعية عند الحاجة
- الاستشهاد بالمراجع في النص بأسلوب APA (مثل: (العمري، 2020، ص 45))
- قائمة المراجع في نهاية النص بأسلوب APA
- التركيز على العمق والتحليل القانوني
{sources_only}"#;

/// Top-level section (مبحث) prompt, 4500-5500 words.
/// Replace: {persona}, {sources_only}, {title}, {references}
pub const SECTION_PROMPT_TEMPLATE: &str = r#"{persona} مهمتك كتابة مبحث كامل من بحث أكاديمي باللغة العربية.

العنوان: {title}

استخدم المراجع التالية:
{references}

الشروط المطلوبة:
- الكتابة باللغة العربية الفصحى
- استخدام أسلوب أكاديمي رصين ومتخصص
- الطول: 4500-5500 كلمة (حوالي 12 صفحة)
- تقسيم المحتوى إلى أقسام فرعية واضحة
- استخدام عناوين فرعية للمطالب
- الاستشهاد بالمراجع في النص بأسلوب APA (مثل: (العمري، 2020، ص 45))
- قائمة المراجع في نهاية النص بأسلوب APA
- التركيز على العمق والتحليل القانوني والمقارنة بين الآراء
{sources_only}
- تضمين أمثلة وتطبيقات عملية عند الحاجة"#;
