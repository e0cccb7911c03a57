//! 模板字段表 - 领域常量
//!
//! 工作大纲 DOCX 模板的占位符字段表，与模板中的 `{{ key }}` 一一对应。
//! 进程启动时定义一次，之后不可变；字段顺序即表单/表头的展示顺序。

/// 模板要求的字段表（有序、不可变）
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<Field>,
}

/// 单个模板字段：键名 + 人类可读标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// 占位符键名（同时是上传表格的列名）
    pub key: &'static str,
    /// 展示给用户的标签
    pub label: &'static str,
}

/// 压缩包条目命名使用的两个关键字段
pub const ENTRY_KEY_FIELDS: (&str, &str) = ("module_code", "specialty_code");

/// 工作大纲模板的字段定义（键名与模板占位符一致）
const PROGRAM_FIELDS: &[(&str, &str)] = &[
    ("college_name", "Название колледжа"),
    ("commission_name", "Название цикловой комиссии"),
    ("approval_position", "Должность утверждающего"),
    ("approval_signature", "ФИО утверждающего (подпись)"),
    ("approval_date", "Дата утверждения"),
    ("module_code", "Код модуля (ПМ.01)"),
    ("module_name", "Название модуля"),
    ("specialty_code", "Код специальности (09.02.06)"),
    ("specialty_name", "Название специальности"),
    ("year", "Год разработки программы"),
    ("fgos_specialty_code", "Код специальности в ФГОС (09.02.01)"),
    ("fgos_date", "Дата приказа ФГОС"),
    ("fgos_order", "Номер приказа ФГОС"),
    ("example_program_date", "Дата примерной программы"),
    ("example_program_order", "Номер приказа примерной программы"),
    ("study_plan_date", "Дата утверждения учебного плана"),
    ("pck_protocol_number", "Номер протокола ПЦК"),
    ("pck_protocol_date", "Дата протокола ПЦК"),
    ("pck_chair", "Председатель ПЦК (ФИО)"),
    ("employer_position", "Должность представителя работодателя"),
    ("employer_signature", "ФИО представителя работодателя"),
    ("method_council_protocol", "Протокол методического совета"),
    ("developer_name", "ФИО разработчика"),
    ("developer_category", "Категория разработчика (первой/высшей)"),
    ("field_of_study", "Область техники (вычислительная техника)"),
];

impl Schema {
    /// 工作大纲模板的固定字段表
    pub fn program_fields() -> Self {
        Self {
            fields: PROGRAM_FIELDS
                .iter()
                .map(|&(key, label)| Field { key, label })
                .collect(),
        }
    }

    /// 字段数量
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 按定义顺序遍历字段
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// 按定义顺序返回所有键名
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }

    /// 是否包含指定键
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }

    /// 查找键对应的标签
    pub fn label_of(&self, key: &str) -> Option<&'static str> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.label)
    }
}
